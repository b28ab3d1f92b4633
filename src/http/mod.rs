//! # Módulo HTTP
//!
//! Este módulo implementa la parte mínima del protocolo HTTP/1.0 que el
//! contenedor necesita: extraer método y path de la request line, y
//! serializar una respuesta válida (status line + headers + body).
//!
//! Todo lo demás del protocolo (headers del request, body, query params)
//! queda fuera del alcance: el contenedor solo enruta por path.
//!
//! ### Formato de Request (lo único que parseamos)
//!
//! ```text
//! GET /book HTTP/1.0\r\n
//! ...headers ignorados...\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 13\r\n
//! \r\n
//! {"ok": true}
//! ```

pub mod request;   // Parsing de la request line
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, Request};
pub use response::Response;
pub use status::StatusCode;
