use actix_web::web;

pub mod admin;
pub mod backend_health;
pub mod matches;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Match routes (require authentication)
    cfg.service(
        web::scope("/api/matchs")
            .wrap(AuthMiddleware)
            .service(matches::get_match)
            .service(matches::start_match)
            .service(matches::list_events)
            .service(matches::record_event)
            .service(matches::list_stats)
            .service(matches::edit_stats)
            .service(matches::get_half_time)
            .service(matches::record_half_time)
            .service(matches::get_full_time)
            .service(matches::record_full_time)
            .service(matches::get_lineup)
            .service(matches::set_lineup)
            .service(matches::get_election)
            .service(matches::elect_players)
    );

    admin::init_admin_routes(cfg);
}
