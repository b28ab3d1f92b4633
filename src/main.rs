//! # Servlet Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del contenedor de servlets.
//!
//! El único error fatal es el fallo de bind: cualquier otro fallo se
//! maneja dentro del ciclo de su conexión y el proceso sigue sirviendo.

use servlet_server::config::Config;
use servlet_server::server::Server;

fn main() {
    println!("=================================");
    println!("  Servlet Server HTTP/1.0");
    println!("  Principios de Sistemas Operativos");
    println!("=================================\n");

    // Configuración desde CLI y variables de entorno
    let config = Config::new();

    if let Err(e) = config.validate() {
        eprintln!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.print_summary();

    // Crear el servidor con las rutas y servlets por defecto
    let server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
