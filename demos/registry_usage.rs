//! 注册表基本用法演示

use std::sync::Mutex;

use svc_registry::logging::{init_logging, LoggingConfig};
use svc_registry::{Registry, RegistryError};

#[derive(Debug)]
struct DatabaseService {
    connection_string: String,
}

#[derive(Debug)]
struct RequestLog {
    entries: Mutex<Vec<String>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::development())?;

    let mut registry = Registry::named("demo");

    registry.define_value("db.url", "postgresql://localhost:5432/myapp".to_string());
    registry.define_singleton("db", |reg: &mut Registry| DatabaseService {
        connection_string: reg
            .resolve_as::<String>("db.url")
            .map(|url| url.to_string())
            .unwrap_or_default(),
    });
    registry.define_singleton("log", |_| RequestLog {
        entries: Mutex::new(Vec::new()),
    });
    registry.define_transient("request.id", |_| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default()
    });

    let db = registry.must_resolve_as::<DatabaseService>("db")?;
    println!("📦 database: {}", db.connection_string);

    for _ in 0..3 {
        let id = registry.must_resolve_as::<u128>("request.id")?;
        let log = registry.must_resolve_as::<RequestLog>("log")?;
        let mut entries = log.entries.lock().map_err(|e| e.to_string())?;
        entries.push(format!("request {}", id));
    }

    let log = registry.must_resolve_as::<RequestLog>("log")?;
    println!("📝 requests logged: {}", log.entries.lock().map(|e| e.len()).unwrap_or(0));

    match registry.must_resolve("cache") {
        Err(RegistryError::ServiceNotDefined(id)) => println!("⚠️ {} is not defined", id),
        other => println!("unexpected: {:?}", other.map(|_| ())),
    }

    println!("📊 {}", registry.stats());
    Ok(())
}
