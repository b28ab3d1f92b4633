//! # CarServlet
//! src/servlets/car.rs
//!
//! Servlet de demostración para `/car`: responde con un catálogo fijo de
//! autos en JSON.

use crate::http::{Request, Response, StatusCode};
use crate::servlet::{Servlet, ServletError};
use serde::Serialize;

/// Un auto del catálogo
#[derive(Debug, Clone, Serialize)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub year: u16,
}

/// Servlet que atiende `/car`
pub struct CarServlet {
    catalog: Vec<Car>,
}

impl CarServlet {
    pub fn new() -> Self {
        Self {
            catalog: vec![
                Car {
                    brand: "Toyota".to_string(),
                    model: "Corolla".to_string(),
                    year: 2020,
                },
                Car {
                    brand: "Hyundai".to_string(),
                    model: "Tucson".to_string(),
                    year: 2022,
                },
            ],
        }
    }
}

impl Default for CarServlet {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct CarList<'a> {
    cars: &'a [Car],
}

impl Servlet for CarServlet {
    fn service(
        &mut self,
        _request: &Request,
        response: &mut Response,
    ) -> Result<(), ServletError> {
        let body = serde_json::to_string(&CarList {
            cars: &self.catalog,
        })
        .map_err(|e| ServletError::new(&format!("JSON serialization failed: {}", e)))?;

        response.write_json(StatusCode::Ok, &body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    #[test]
    fn test_car_servlet_responds_json() {
        let mut servlet = CarServlet::new();
        let request = Request::new(Method::GET, "/car");
        let mut response = Response::new();

        servlet.service(&request, &mut response).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body.contains("cars"));
        assert!(body.contains("Corolla"));
    }

    #[test]
    fn test_catalog_is_valid_json() {
        let mut servlet = CarServlet::new();
        let request = Request::new(Method::GET, "/car");
        let mut response = Response::new();
        servlet.service(&request, &mut response).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(response.body()).expect("body should be valid JSON");
        assert_eq!(parsed["cars"].as_array().unwrap().len(), 2);
    }
}
