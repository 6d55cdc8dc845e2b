use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use periferia_social::api;
use periferia_social::config::Config;
use periferia_social::db::{create_mysql_pool, seed_demo_data};
use periferia_social::error::ApiError;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");

    log::info!(
        "Starting server on {}:{}",
        config.server.host,
        config.server.port
    );

    let mysql_pool = create_mysql_pool(&config)
        .await
        .expect("Failed to create MySQL pool");

    log::info!("Database connection established");

    if config.seed_demo_data {
        seed_demo_data(&mysql_pool)
            .await
            .expect("Failed to seed demo data");
    }

    let openapi = api::ApiDoc::openapi();

    let server_host = config.server.host.clone();
    let server_port = config.server.port;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(mysql_pool.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::Validation(format!("Cuerpo de la petición inválido: {}", err)).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                ApiError::Validation(format!("Parámetro de ruta inválido: {}", err)).into()
            }))
            .route(
                "/api/docs",
                web::get().to(|| async {
                    actix_web::HttpResponse::PermanentRedirect()
                        .append_header(("Location", "/api/docs/"))
                        .finish()
                }),
            )
            .service(
                SwaggerUi::new("/api/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(api::health::get_health))
                    .service(
                        web::scope("/auth").route("/login", web::post().to(api::auth::login)),
                    )
                    .service(web::scope("/users").route("/me", web::get().to(api::users::me)))
                    .service(
                        web::scope("/posts")
                            .route("", web::get().to(api::posts::get_feed))
                            .route("", web::post().to(api::posts::create_post))
                            .route("/{id}/like", web::post().to(api::posts::like_post))
                            .route("/{id}/unlike", web::post().to(api::posts::unlike_post)),
                    ),
            )
    })
    .bind(format!("{}:{}", server_host, server_port))?
    .run()
    .await
}
