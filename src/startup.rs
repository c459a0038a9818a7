//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{health_check, home};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, std::io::Error> {
        let address = config.application.address();
        let tcp_listener = TcpListener::bind(&address)?;
        let port = tcp_listener.local_addr()?.port();

        tracing::info!(%address, port, "Listening");

        let server = run(tcp_listener)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(TracingLogger::default())
            // Resources answer 405 for methods they have no route for.
            // HEAD shares the GET handler; the body is dropped on the way out.
            .service(
                web::resource("/")
                    .route(web::get().to(home))
                    .route(web::head().to(home)),
            )
            .service(
                web::resource("/health")
                    .route(web::get().to(health_check))
                    .route(web::head().to(health_check)),
            )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
