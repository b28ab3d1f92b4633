//! # Tabla de Rutas
//! src/router/mod.rs
//!
//! Este módulo implementa la tabla que mapea paths HTTP al nombre del
//! servlet que los atiende. La tabla se construye una sola vez al arrancar
//! el proceso a partir de una lista estática de mapeos y después se trata
//! como inmutable (solo lectura durante toda la vida del servidor).
//!
//! ## Arquitectura
//!
//! ```text
//! ServletMapping (nombre, path, servlet) → RouteTable → Dispatcher
//! ```
//!
//! La búsqueda es por igualdad exacta de strings: sin patrones, sin
//! wildcards, sin normalización de trailing slash.

use std::collections::HashMap;

/// Asociación entre un path y el servlet que lo atiende
///
/// Es la tripleta de configuración `(nombre, path, servlet)`. El nombre es
/// solo descriptivo; el path es la clave de enrutamiento y `servlet` es el
/// identificador con el que se busca la fábrica en el registro.
#[derive(Debug, Clone)]
pub struct ServletMapping {
    /// Nombre descriptivo del mapeo (ej: "Book")
    pub name: String,

    /// Path HTTP exacto (ej: "/book")
    pub path: String,

    /// Identificador del servlet (ej: "BookServlet")
    pub servlet: String,
}

impl ServletMapping {
    pub fn new(name: &str, path: &str, servlet: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            servlet: servlet.to_string(),
        }
    }
}

/// Lista estática de mapeos con la que arranca el servidor
///
/// Equivale al archivo de configuración de un contenedor real: se carga una
/// vez al inicio y no hay recarga dinámica.
pub fn default_mappings() -> Vec<ServletMapping> {
    vec![
        ServletMapping::new("Book", "/book", "BookServlet"),
        ServletMapping::new("Car", "/car", "CarServlet"),
        ServletMapping::new("Status", "/status", "StatusServlet"),
    ]
}

/// Tabla de rutas: path → identificador de servlet
pub struct RouteTable {
    /// Mapa de path → servlet
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Crea una tabla de rutas vacía
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Construye la tabla desde una lista de mapeos
    ///
    /// # Ejemplo
    /// ```
    /// use servlet_server::router::{RouteTable, default_mappings};
    ///
    /// let table = RouteTable::from_mappings(&default_mappings());
    /// assert_eq!(table.resolve("/book"), Some("BookServlet"));
    /// ```
    pub fn from_mappings(mappings: &[ServletMapping]) -> Self {
        let mut table = Self::new();
        for mapping in mappings {
            table.register(&mapping.path, &mapping.servlet);
        }
        table
    }

    /// Registra una ruta con su servlet
    ///
    /// Si el path ya estaba registrado, la última registración gana.
    pub fn register(&mut self, path: &str, servlet: &str) {
        self.routes.insert(path.to_string(), servlet.to_string());
    }

    /// Resuelve un path al identificador de servlet registrado
    ///
    /// Búsqueda exacta. Retorna `None` si el path no está registrado: un
    /// path desconocido es un fallo representable, no un crash.
    ///
    /// # Ejemplo
    /// ```
    /// use servlet_server::router::RouteTable;
    ///
    /// let mut table = RouteTable::new();
    /// table.register("/book", "BookServlet");
    ///
    /// assert_eq!(table.resolve("/book"), Some("BookServlet"));
    /// assert_eq!(table.resolve("/bike"), None);
    /// ```
    pub fn resolve(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(|s| s.as_str())
    }

    /// Cantidad de rutas registradas
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Indica si la tabla está vacía
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
