use actix_web::web;

use crate::handlers::admin::match_admin_handler;
use crate::middleware::admin::AdminMiddleware;

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            // Match management routes
            .service(
                web::resource("/matchs")
                    .route(web::post().to(match_admin_handler::create_match))
            )
            .service(
                web::resource("/matchs/{id}/validate-stats")
                    .route(web::patch().to(match_admin_handler::validate_stats))
            )
    );
}
