//! # Servlet Server
//! src/lib.rs
//!
//! Contenedor de servlets minimalista implementado desde cero para demostrar
//! cómo un contenedor estilo servlet despacha peticiones HTTP: tabla de rutas
//! estática, resolución tardía del servlet por nombre e invocación polimórfica.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de la request line y construcción de responses HTTP/1.0
//! - `config`: Configuración por CLI y variables de entorno
//! - `router`: Tabla de rutas (path → nombre de servlet)
//! - `servlet`: Trait `Servlet` y registro de fábricas por nombre
//! - `servlets`: Servlets concretos de demostración (book, car, status)
//! - `dispatcher`: Resolución de ruta + construcción e invocación del servlet
//! - `server`: Accept loop TCP secuencial (una conexión a la vez)
//! - `error`: Tipo de error etiquetado del servidor
//!
//! ## Flujo de una petición
//!
//! ```text
//! Accept Loop → Request::parse → Dispatcher → RouteTable → ServletRegistry
//!            → Servlet::service → Response::to_bytes → socket
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use servlet_server::config::Config;
//! use servlet_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod http;
pub mod config;
pub mod error;
pub mod router;
pub mod servlet;
pub mod servlets;
pub mod dispatcher;
pub mod server;
