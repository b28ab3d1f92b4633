//! # Errores del Servidor
//! src/error.rs
//!
//! Tipo de error etiquetado que distingue las categorías de fallo del
//! contenedor. En vez de un catch-all que se traga cualquier excepción,
//! cada fallo queda clasificado para que el código que maneja la conexión
//! pueda decidir qué respuesta HTTP generar.
//!
//! ## Política de propagación
//!
//! - `Bind` es fatal: sin socket de escucha no hay servidor.
//! - Todo lo demás queda contenido dentro del ciclo de una conexión y
//!   nunca termina el accept loop.

use crate::http::request::ParseError;
use crate::http::StatusCode;
use std::fmt;
use std::io;

/// Errores que puede producir el servidor
#[derive(Debug)]
pub enum ServerError {
    /// No se pudo hacer bind del socket de escucha (fatal)
    Bind { address: String, source: io::Error },

    /// El request no tiene forma de HTTP: no se pudo extraer el path
    MalformedRequest(ParseError),

    /// No hay servlet registrado para el path solicitado
    RouteNotFound(String),

    /// La ruta existe pero no hay fábrica registrada para ese servlet
    HandlerResolution(String),

    /// El servlet falló (o hizo panic) durante `service`
    HandlerExecution { servlet: String, message: String },

    /// Error de I/O sobre el socket de una conexión
    Io(io::Error),
}

impl ServerError {
    /// Status HTTP con el que se responde al cliente para este error.
    ///
    /// `None` para errores que nunca llegan a un cliente (`Bind`, `Io`).
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ServerError::MalformedRequest(_) => Some(StatusCode::BadRequest),
            ServerError::RouteNotFound(_) => Some(StatusCode::NotFound),
            ServerError::HandlerResolution(_) => Some(StatusCode::InternalServerError),
            ServerError::HandlerExecution { .. } => Some(StatusCode::InternalServerError),
            ServerError::Bind { .. } | ServerError::Io(_) => None,
        }
    }

    /// Indica si el error impide que el servidor siga funcionando
    pub fn is_fatal(&self) -> bool {
        matches!(self, ServerError::Bind { .. })
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind { address, source } => {
                write!(f, "Bind error on {}: {}", address, source)
            }
            ServerError::MalformedRequest(e) => write!(f, "Malformed request: {}", e),
            ServerError::RouteNotFound(path) => write!(f, "Route not found: {}", path),
            ServerError::HandlerResolution(name) => {
                write!(f, "No servlet factory registered for '{}'", name)
            }
            ServerError::HandlerExecution { servlet, message } => {
                write!(f, "Servlet '{}' failed: {}", servlet, message)
            }
            ServerError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind { source, .. } => Some(source),
            ServerError::MalformedRequest(e) => Some(e),
            ServerError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ServerError {
    fn from(err: io::Error) -> Self {
        ServerError::Io(err)
    }
}

impl From<ParseError> for ServerError {
    fn from(err: ParseError) -> Self {
        ServerError::MalformedRequest(err)
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
