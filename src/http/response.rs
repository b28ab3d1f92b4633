//! # Construcción de Respuestas HTTP
//!
//! Este módulo implementa el lado de escritura del adaptador de conexión:
//! un `Response` es un buffer (status + headers + body) que los servlets
//! llenan y que el servidor serializa una única vez al final del ciclo de
//! la conexión.
//!
//! Escribir dos veces no es un error: la última escritura gana, porque
//! nada llega al socket hasta `to_bytes()`.
//!
//! ## Formato de una respuesta HTTP/1.0
//!
//! ```text
//! HTTP/1.0 200 OK\r\n
//! Content-Type: application/json\r\n
//! Content-Length: 13\r\n
//! \r\n
//! {"ok": true}
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use servlet_server::http::{Response, StatusCode};
//!
//! let mut response = Response::new();
//! response.write_json(StatusCode::Ok, r#"{"message": "Hello"}"#);
//!
//! let bytes = response.to_bytes();
//! // Ahora puedes enviar `bytes` por el socket
//! ```

use super::StatusCode;
use std::collections::HashMap;

/// Respuesta HTTP/1.0 en construcción, ligada al ciclo de una conexión
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers HTTP (Content-Type, Content-Length, etc.)
    /// Usamos HashMap para evitar duplicados
    headers: HashMap<String, String>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta vacía (200 OK sin headers ni body)
    pub fn new() -> Self {
        Self {
            status: StatusCode::Ok,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Escribe status y body en la respuesta
    ///
    /// Automáticamente calcula y agrega el header `Content-Length`.
    /// Una segunda escritura reemplaza a la primera.
    ///
    /// # Ejemplo
    /// ```
    /// use servlet_server::http::{Response, StatusCode};
    ///
    /// let mut response = Response::new();
    /// response.write(StatusCode::Ok, "Hello World");
    /// ```
    pub fn write(&mut self, status: StatusCode, body: &str) {
        self.status = status;
        self.body = body.as_bytes().to_vec();
        self.headers
            .insert("Content-Length".to_string(), self.body.len().to_string());
    }

    /// Escribe status y body JSON en la respuesta
    ///
    /// Automáticamente establece `Content-Type: application/json`.
    pub fn write_json(&mut self, status: StatusCode, body: &str) {
        self.write(status, body);
        self.headers.insert(
            "Content-Type".to_string(),
            "application/json".to_string(),
        );
    }

    /// Escribe una respuesta de error con mensaje JSON
    ///
    /// Formato del JSON: `{"error": "mensaje"}`. El body se construye con
    /// serde_json: el mensaje puede contener comillas, backslashes o saltos
    /// de línea (los panics de servlets traen texto arbitrario) y el
    /// resultado sigue siendo JSON válido.
    ///
    /// # Ejemplo
    /// ```
    /// use servlet_server::http::{Response, StatusCode};
    ///
    /// let mut response = Response::new();
    /// response.write_error(StatusCode::NotFound, "Route not found: /bike");
    /// ```
    pub fn write_error(&mut self, status: StatusCode, message: &str) {
        let body = serde_json::json!({ "error": message });
        self.write_json(status, &body.to_string());
    }

    /// Agrega o sobrescribe un header de la respuesta
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// Genera el formato completo HTTP/1.0:
    /// - Status line: `HTTP/1.0 200 OK\r\n`
    /// - Headers: `Header-Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body: contenido binario
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::new();

        // 1. Status line
        let status_line = format!("HTTP/1.0 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        // 2. Headers
        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        // 3. Línea vacía que separa headers del body
        result.extend_from_slice(b"\r\n");

        // 4. Body (si existe)
        result.extend_from_slice(&self.body);

        result
    }

    /// Convierte la respuesta a bytes omitiendo el body
    ///
    /// Para responder a HEAD: se envían status line y headers (incluido el
    /// `Content-Length` que tendría la respuesta completa) pero sin body,
    /// como exige el RFC 1945.
    pub fn to_bytes_without_body(&self) -> Vec<u8> {
        let mut result = Vec::new();

        let status_line = format!("HTTP/1.0 {}\r\n", self.status);
        result.extend_from_slice(status_line.as_bytes());

        for (name, value) in &self.headers {
            let header_line = format!("{}: {}\r\n", name, value);
            result.extend_from_slice(header_line.as_bytes());
        }

        result.extend_from_slice(b"\r\n");

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene una referencia a los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}
