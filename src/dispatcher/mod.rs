//! # Dispatcher
//! src/dispatcher/mod.rs
//!
//! El elemento central del contenedor: dada una petición, consulta la tabla
//! de rutas, resuelve el nombre del servlet a una instancia fresca vía el
//! registro de fábricas, y la invoca con el par request/response.
//!
//! ## Flujo
//!
//! ```text
//! dispatch(request, response)
//!   ├─ RouteTable.resolve(path)      → RouteNotFound si no hay ruta
//!   ├─ ServletRegistry.create(name)  → HandlerResolution si no hay fábrica
//!   └─ servlet.service(req, res)     → HandlerExecution si falla o hace panic
//! ```
//!
//! Ningún fallo del servlet escapa de este límite: tanto un `Err` como un
//! panic se convierten en un resultado etiquetado para que el código de la
//! conexión decida qué responder. El dispatcher no tiene estado propio más
//! allá de las dos tablas de solo lectura.

use crate::error::ServerError;
use crate::http::{Request, Response};
use crate::router::RouteTable;
use crate::servlet::ServletRegistry;
use std::panic::{self, AssertUnwindSafe};

/// Despachador de peticiones: rutas + fábricas de servlets
pub struct Dispatcher {
    routes: RouteTable,
    registry: ServletRegistry,
}

impl Dispatcher {
    /// Crea un dispatcher con una tabla de rutas y un registro ya poblados
    pub fn new(routes: RouteTable, registry: ServletRegistry) -> Self {
        Self { routes, registry }
    }

    /// Despacha una petición al servlet que corresponde a su path
    ///
    /// Si la ruta no existe, ningún servlet se construye ni se invoca.
    /// Cada despacho construye una instancia nueva del servlet: no hay
    /// estado compartido entre peticiones.
    pub fn dispatch(
        &self,
        request: &Request,
        response: &mut Response,
    ) -> Result<(), ServerError> {
        let path = request.path();

        // 1. Resolver path → nombre de servlet
        let servlet_name = self
            .routes
            .resolve(path)
            .ok_or_else(|| ServerError::RouteNotFound(path.to_string()))?
            .to_string();

        // 2. Resolver nombre → instancia fresca
        let mut servlet = self
            .registry
            .create(&servlet_name)
            .ok_or_else(|| ServerError::HandlerResolution(servlet_name.clone()))?;

        // 3. Invocar, conteniendo cualquier fallo del servlet en este límite
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            servlet.service(request, response)
        }));

        match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(ServerError::HandlerExecution {
                servlet: servlet_name,
                message: e.to_string(),
            }),
            Err(panic_payload) => {
                let message = panic_message(panic_payload.as_ref());
                Err(ServerError::HandlerExecution {
                    servlet: servlet_name,
                    message,
                })
            }
        }
    }

    /// Acceso de solo lectura a la tabla de rutas
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}

/// Extrae un mensaje legible del payload de un panic
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "servlet panicked".to_string()
    }
}
