//! # Módulo del Servidor
//! src/server/mod.rs
//!
//! Este módulo implementa el accept loop TCP:
//! 1. Hace bind en la dirección configurada (fallo de bind es fatal)
//! 2. Acepta conexiones de una en una
//! 3. Lee y parsea la request line
//! 4. Delega al dispatcher y envía la response
//! 5. Cierra la conexión incondicionalmente
//!
//! El procesamiento es estrictamente secuencial: una conexión se atiende
//! hasta completarse antes de aceptar la siguiente.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
