//! # BookServlet
//! src/servlets/book.rs
//!
//! Servlet de demostración para `/book`: responde con un catálogo fijo de
//! libros en JSON.

use crate::http::{Request, Response, StatusCode};
use crate::servlet::{Servlet, ServletError};
use serde::Serialize;

/// Un libro del catálogo
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: u16,
}

/// Servlet que atiende `/book`
///
/// # Ejemplo de response
/// ```json
/// {
///   "books": [
///     {"title": "El túnel", "author": "Ernesto Sabato", "year": 1948}
///   ]
/// }
/// ```
pub struct BookServlet {
    catalog: Vec<Book>,
}

impl BookServlet {
    pub fn new() -> Self {
        Self {
            catalog: vec![
                Book {
                    title: "El túnel".to_string(),
                    author: "Ernesto Sabato".to_string(),
                    year: 1948,
                },
                Book {
                    title: "Cien años de soledad".to_string(),
                    author: "Gabriel García Márquez".to_string(),
                    year: 1967,
                },
                Book {
                    title: "Rayuela".to_string(),
                    author: "Julio Cortázar".to_string(),
                    year: 1963,
                },
            ],
        }
    }
}

impl Default for BookServlet {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct BookList<'a> {
    books: &'a [Book],
}

impl Servlet for BookServlet {
    fn service(
        &mut self,
        _request: &Request,
        response: &mut Response,
    ) -> Result<(), ServletError> {
        let body = serde_json::to_string(&BookList {
            books: &self.catalog,
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
    fn test_book_servlet_responds_json() {
        let mut servlet = BookServlet::new();
        let request = Request::new(Method::GET, "/book");
        let mut response = Response::new();

        servlet.service(&request, &mut response).unwrap();

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(
            response.headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );

        let body = String::from_utf8(response.body().to_vec()).unwrap();
        assert!(body.contains("books"));
        assert!(body.contains("Rayuela"));
    }

    #[test]
    fn test_catalog_is_valid_json() {
        let mut servlet = BookServlet::new();
        let request = Request::new(Method::GET, "/book");
        let mut response = Response::new();
        servlet.service(&request, &mut response).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(response.body()).expect("body should be valid JSON");
        assert_eq!(parsed["books"].as_array().unwrap().len(), 3);
    }
}
