//! # Trait Servlet
//! src/servlet/mod.rs
//!
//! Define la capacidad polimórfica que implementa toda unidad de lógica de
//! peticiones: una única operación `service(request, response)`.
//!
//! El dispatcher no conoce los tipos concretos: trabaja con `Box<dyn
//! Servlet>` construido en el momento del despacho a partir del nombre
//! registrado. Cada invocación recibe una instancia fresca, así que un
//! servlet puede tener estado interno mutable sin que se filtre entre
//! peticiones.

pub mod registry;

pub use registry::ServletRegistry;

use crate::http::{Request, Response};
use std::fmt;

/// Error producido por un servlet durante `service`
///
/// Es deliberadamente simple: un mensaje. El dispatcher lo convierte en un
/// `ServerError::HandlerExecution` con el nombre del servlet.
#[derive(Debug)]
pub struct ServletError(pub String);

impl ServletError {
    pub fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl fmt::Display for ServletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ServletError {}

/// Unidad de lógica de peticiones, invocada una vez por request que matchea
pub trait Servlet {
    /// Atiende una petición escribiendo la respuesta en el sink
    ///
    /// El request es de solo lectura; la respuesta se escribe en el buffer
    /// `response`, que el servidor serializa al terminar el ciclo.
    fn service(&mut self, request: &Request, response: &mut Response)
        -> Result<(), ServletError>;
}

/// Fábrica de servlets: produce una instancia fresca por invocación
pub type ServletFactory = fn() -> Box<dyn Servlet>;
