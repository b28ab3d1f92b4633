//! # Servlets del Servidor
//!
//! Este módulo contiene los servlets concretos que el contenedor puede
//! despachar. Son contenido de demostración: existen para ejercitar el
//! ciclo completo de despacho (ruta → fábrica → `service`), no como lógica
//! de negocio real.
//!
//! Cada servlet es un tipo que implementa el trait `Servlet` y se registra
//! en el `ServletRegistry` bajo el mismo nombre que usa la tabla de rutas.

pub mod book;
pub mod car;
pub mod status;

pub use book::BookServlet;
pub use car::CarServlet;
pub use status::StatusServlet;

use crate::servlet::ServletRegistry;

/// Construye el registro con las fábricas de los servlets por defecto
///
/// Los nombres deben coincidir con los identificadores que usa
/// `router::default_mappings()`.
pub fn default_registry() -> ServletRegistry {
    let mut registry = ServletRegistry::new();
    registry.register("BookServlet", || Box::new(BookServlet::new()));
    registry.register("CarServlet", || Box::new(CarServlet::new()));
    registry.register("StatusServlet", || Box::new(StatusServlet::new()));
    registry
}
