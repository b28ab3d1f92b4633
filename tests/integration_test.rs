//! Tests de integración del contenedor de servlets
//! tests/integration_test.rs
//!
//! Cada test arranca su propia instancia del servidor sobre un puerto
//! efímero y le habla por un socket real, igual que lo haría un cliente
//! HTTP. El thread del servidor queda corriendo hasta el final del proceso
//! de tests (el accept loop es infinito por diseño).

use servlet_server::config::Config;
use servlet_server::dispatcher::Dispatcher;
use servlet_server::http::{Request, Response};
use servlet_server::router::{default_mappings, RouteTable};
use servlet_server::servlet::{Servlet, ServletError};
use servlet_server::servlets::default_registry;
use servlet_server::server::Server;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Arranca un servidor con las rutas por defecto en un puerto efímero
fn spawn_default_server() -> SocketAddr {
    let dispatcher = Dispatcher::new(
        RouteTable::from_mappings(&default_mappings()),
        default_registry(),
    );
    spawn_server(dispatcher)
}

/// Arranca un servidor con un dispatcher arbitrario en un puerto efímero
fn spawn_server(dispatcher: Dispatcher) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local_addr");

    let server = Server::with_dispatcher(Config::default(), dispatcher);
    thread::spawn(move || {
        // Loop infinito: el thread muere cuando termina el proceso de tests
        let _ = server.run_with_listener(listener);
    });

    addr
}

/// Helper: envía un request HTTP y retorna la response completa
fn send_request(addr: SocketAddr, path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut stream = TcpStream::connect(addr)?;

    // Configurar timeouts
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    stream.set_write_timeout(Some(Duration::from_secs(5)))?;

    // Construir request HTTP/1.0 (más simple)
    let request = format!("GET {} HTTP/1.0\r\n\r\n", path);

    stream.write_all(request.as_bytes())?;
    stream.flush()?;
    stream.shutdown(std::net::Shutdown::Write)?;

    // Leer response
    let mut response = String::new();
    stream.read_to_string(&mut response)?;

    Ok(response)
}

/// Helper: extrae el body de una response HTTP
fn extract_body(response: &str) -> &str {
    // Buscar la línea vacía que separa headers del body
    if let Some(pos) = response.find("\r\n\r\n") {
        &response[pos + 4..]
    } else {
        ""
    }
}

#[test]
fn test_book_endpoint() {
    let addr = spawn_default_server();
    let response = send_request(addr, "/book").expect("Failed to send request");

    assert!(response.contains("200 OK"), "Expected 200 OK, got: {}", response);
    assert!(response.contains("Content-Type: application/json"));

    let body = extract_body(&response);
    assert!(body.contains("books"), "Body should contain 'books'");
}

#[test]
fn test_car_endpoint() {
    let addr = spawn_default_server();
    let response = send_request(addr, "/car").expect("Failed to send request");

    assert!(response.contains("200 OK"));
    let body = extract_body(&response);
    assert!(body.contains("cars"));
}

#[test]
fn test_status_endpoint() {
    let addr = spawn_default_server();
    let response = send_request(addr, "/status").expect("Failed to send request");

    assert!(response.contains("200 OK"));
    let body = extract_body(&response);
    assert!(body.contains("status"));
    assert!(body.contains("running"));
}

#[test]
fn test_not_found() {
    let addr = spawn_default_server();
    let response = send_request(addr, "/bike").expect("Failed to send request");

    assert!(response.contains("404"), "Expected 404 for non-existent route");
    let body = extract_body(&response);
    assert!(body.contains("error"));
    assert!(body.contains("/bike"));
}

#[test]
fn test_malformed_request() {
    let addr = spawn_default_server();

    let mut stream = TcpStream::connect(addr).expect("connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream.write_all(b"\x00\x01\x02\xffgarbage").unwrap();
    stream.shutdown(std::net::Shutdown::Write).unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).unwrap();
    let response = String::from_utf8_lossy(&buf);

    assert!(response.contains("400 Bad Request"));
}

#[test]
fn test_multiple_requests_sequentially() {
    // El servidor atiende una conexión a la vez; varias seguidas deben
    // funcionar sin estado residual entre ellas
    let addr = spawn_default_server();

    for _ in 0..5 {
        let response = send_request(addr, "/book").expect("Failed to send request");
        assert!(response.contains("200 OK"));
    }
}

#[test]
fn test_panicking_servlet_then_healthy_route() {
    struct CrashServlet;
    impl Servlet for CrashServlet {
        fn service(
            &mut self,
            _request: &Request,
            _response: &mut Response,
        ) -> Result<(), ServletError> {
            panic!("crash on purpose");
        }
    }

    let mut routes = RouteTable::from_mappings(&default_mappings());
    routes.register("/crash", "CrashServlet");
    let mut registry = default_registry();
    registry.register("CrashServlet", || Box::new(CrashServlet));

    let addr = spawn_server(Dispatcher::new(routes, registry));

    // El servlet que hace panic produce un 500...
    let response = send_request(addr, "/crash").expect("Failed to send request");
    assert!(response.contains("500 Internal Server Error"));

    // ...y el servidor sigue atendiendo la siguiente conexión
    let response = send_request(addr, "/book").expect("Failed to send request");
    assert!(response.contains("200 OK"));
}

#[test]
fn test_route_without_factory_is_server_error() {
    let mut routes = RouteTable::from_mappings(&default_mappings());
    routes.register("/ghost", "GhostServlet");

    // Registro por defecto: no tiene fábrica para GhostServlet
    let addr = spawn_server(Dispatcher::new(routes, default_registry()));

    let response = send_request(addr, "/ghost").expect("Failed to send request");
    assert!(response.contains("500 Internal Server Error"));

    let body = extract_body(&response);
    assert!(body.contains("GhostServlet"));
}
