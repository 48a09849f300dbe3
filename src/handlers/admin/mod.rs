pub mod match_admin_handler;
