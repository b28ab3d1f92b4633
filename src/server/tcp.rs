//! # Accept Loop TCP Secuencial
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP. A diferencia de un servidor de
//! producción, aquí no hay threads ni keep-alive: se acepta una conexión,
//! se procesa hasta el final (parseo, despacho, respuesta) y se cierra
//! antes de volver a `accept`. Un servlet lento bloquea todo el servidor;
//! esa es una restricción deliberada del diseño.
//!
//! ## Manejo de errores en el loop
//!
//! - Fallo de bind: fatal, `run` retorna `Err` y el proceso termina.
//! - Error de accept: se loguea y el loop continúa.
//! - Errores por petición (400/404/500): se responden al cliente y nunca
//!   terminan el loop.
//! - La conexión se cierra en todos los caminos de salida (el `TcpStream`
//!   se dropea al final de cada iteración).

use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::ServerError;
use crate::http::{Method, Request, Response, StatusCode};
use crate::router::{default_mappings, RouteTable};
use crate::servlets::default_registry;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

/// Tamaño del buffer de lectura por conexión
const READ_BUFFER_SIZE: usize = 8192;

/// Contenedor de servlets HTTP/1.0 secuencial
pub struct Server {
    config: Config,
    dispatcher: Dispatcher,
}

impl Server {
    /// Crea el servidor con las rutas y servlets por defecto
    pub fn new(config: Config) -> Self {
        let routes = RouteTable::from_mappings(&default_mappings());
        let registry = default_registry();
        Self::with_dispatcher(config, Dispatcher::new(routes, registry))
    }

    /// Crea el servidor con un dispatcher ya armado
    ///
    /// Útil en tests y para servir un conjunto de rutas alternativo.
    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// Inicia el servidor: bind + accept loop
    ///
    /// Un fallo de bind es fatal: se retorna `Err(ServerError::Bind)` sin
    /// entrar nunca al accept loop. En caso de éxito esta función no
    /// retorna (el loop es infinito).
    pub fn run(&self) -> Result<(), ServerError> {
        let address = self.config.address();
        println!("[*] Iniciando servidor en {}", address);

        let listener = TcpListener::bind(&address).map_err(|e| ServerError::Bind {
            address: address.clone(),
            source: e,
        })?;

        println!("[+] Servidor escuchando en {}", address);
        println!("[*] Modo secuencial: una conexión a la vez\n");

        self.run_with_listener(listener)
    }

    /// Accept loop sobre un listener ya creado
    ///
    /// Separado de `run` para poder testear con un puerto efímero.
    pub fn run_with_listener(&self, listener: TcpListener) -> Result<(), ServerError> {
        loop {
            match listener.accept() {
                Ok((stream, peer_addr)) => {
                    println!("   ✅ Conexión desde {}", peer_addr);

                    // Procesar la conexión hasta el final antes del próximo
                    // accept. El stream se dropea (y la conexión se cierra)
                    // al salir de este brazo, con o sin error.
                    if let Err(e) = Self::handle_connection(stream, &self.dispatcher) {
                        eprintln!("   ❌ Error de conexión: {}", e);
                    }
                }
                Err(e) => {
                    // Un accept fallido no termina el servidor
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }
    }

    /// Atiende una conexión: leer → parsear → despachar → responder
    ///
    /// Los errores por petición (request malformado, ruta inexistente,
    /// servlet que falla) se convierten en la respuesta HTTP que les
    /// corresponde; solo los errores de I/O del socket se propagan al
    /// llamador, que los loguea y sigue.
    pub fn handle_connection(
        mut stream: TcpStream,
        dispatcher: &Dispatcher,
    ) -> std::io::Result<()> {
        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            println!("   ✅ Conexión cerrada por el peer");
            return Ok(());
        }

        let mut response = Response::new();

        // Headers por defecto antes del despacho: si un servlet escribe los
        // suyos, los del servlet ganan (last-write-wins)
        response.set_header("Server", "servlet_server/0.1.0");
        response.set_header("Connection", "close");

        let mut head_only = false;

        match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                println!("   ✅ {} {}", request.method().as_str(), request.path());
                head_only = request.method() == Method::HEAD;

                if let Err(e) = dispatcher.dispatch(&request, &mut response) {
                    eprintln!("   ❌ {}", e);
                    // 404 para ruta inexistente, 500 para fallos del servlet
                    let status = e.status().unwrap_or(StatusCode::InternalServerError);
                    response.write_error(status, &e.to_string());
                }
            }
            Err(e) => {
                eprintln!("   ❌ Parse error: {}", e);
                let malformed = ServerError::MalformedRequest(e);
                let status = malformed.status().unwrap_or(StatusCode::BadRequest);
                response.write_error(status, &malformed.to_string());
            }
        }

        // HEAD: headers completos, sin body (RFC 1945)
        let bytes = if head_only {
            response.to_bytes_without_body()
        } else {
            response.to_bytes()
        };

        stream.write_all(&bytes)?;
        stream.flush()?;

        println!("   ✅ {}\n", response.status());

        Ok(())
    }
}
