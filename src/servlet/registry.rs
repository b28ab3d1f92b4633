//! # Registro de Servlets
//! src/servlet/registry.rs
//!
//! Mapa explícito de nombre de servlet → fábrica. Es el reemplazo de la
//! instanciación por reflexión (`Class.forName(nombre).newInstance()`) de
//! un contenedor clásico: dado un identificador string, produce un objeto
//! fresco que implementa `Servlet`.
//!
//! El registro se llena una vez al arrancar, junto con la tabla de rutas,
//! y después es de solo lectura.

use super::{Servlet, ServletFactory};
use std::collections::HashMap;

/// Registro de fábricas de servlets por nombre
pub struct ServletRegistry {
    /// Mapa de nombre → fábrica
    factories: HashMap<String, ServletFactory>,
}

impl ServletRegistry {
    /// Crea un registro vacío
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registra una fábrica bajo un nombre
    ///
    /// Si el nombre ya estaba registrado, la última registración gana
    /// (misma política que la tabla de rutas).
    ///
    /// # Ejemplo
    /// ```
    /// use servlet_server::servlet::ServletRegistry;
    /// use servlet_server::servlets::BookServlet;
    ///
    /// let mut registry = ServletRegistry::new();
    /// registry.register("BookServlet", || Box::new(BookServlet::new()));
    /// assert!(registry.contains("BookServlet"));
    /// ```
    pub fn register(&mut self, name: &str, factory: ServletFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Construye una instancia fresca del servlet registrado bajo `name`
    ///
    /// Cada llamada produce una instancia nueva: ningún servlet se reusa
    /// entre peticiones. Retorna `None` si el nombre no está registrado.
    pub fn create(&self, name: &str) -> Option<Box<dyn Servlet>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Indica si hay una fábrica registrada bajo `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Cantidad de fábricas registradas
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Indica si el registro está vacío
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ServletRegistry {
    fn default() -> Self {
        Self::new()
    }
}
