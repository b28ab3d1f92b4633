//! # StatusServlet
//! src/servlets/status.rs
//!
//! Servlet para `/status`: retorna información básica sobre el estado del
//! servidor.

use crate::http::{Request, Response, StatusCode};
use crate::servlet::{Servlet, ServletError};

/// Servlet que atiende `/status`
///
/// # Ejemplo de response
/// ```json
/// {
///   "status": "running",
///   "version": "0.1.0",
///   "server": "servlet_server"
/// }
/// ```
pub struct StatusServlet;

impl StatusServlet {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusServlet {
    fn default() -> Self {
        Self::new()
    }
}

impl Servlet for StatusServlet {
    fn service(
        &mut self,
        _request: &Request,
        response: &mut Response,
    ) -> Result<(), ServletError> {
        let body = serde_json::json!({
            "status": "running",
            "version": env!("CARGO_PKG_VERSION"),
            "server": "servlet_server",
        });

        response.write_json(StatusCode::Ok, &body.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    #[test]
    fn test_status_servlet() {
        let mut servlet = StatusServlet::new();
        let request = Request::new(Method::GET, "/status");
        let mut response = Response::new();

        servlet.service(&request, &mut response).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);

        let parsed: serde_json::Value =
            serde_json::from_slice(response.body()).expect("body should be valid JSON");
        assert_eq!(parsed["status"], "running");
        assert_eq!(parsed["server"], "servlet_server");
    }
}
