
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};

pub mod prelude;

pub mod shop;

use crouton::{db::Builder, Db};
use crouton_driver_memory::Memory;
use std::sync::{Arc, Mutex, Once};

/// A `Db` over the seeded shop data, with every driver operation logged.
pub struct DbTest {
    db: Db,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    /// The shop schema over the shop data.
    pub async fn shop() -> DbTest {
        let mut builder = Db::builder();
        builder.schema(shop::schema());
        DbTest::setup(&mut builder).await
    }

    /// Builds `builder` over a memory driver seeded with the shop data.
    pub async fn setup(builder: &mut Builder) -> DbTest {
        let memory = Memory::new();
        shop::seed(&memory).await;
        DbTest::with_driver(builder, memory)
    }

    pub fn with_driver(builder: &mut Builder, memory: Memory) -> DbTest {
        init_tracing();

        let driver = LoggingDriver::new(memory);
        let ops_log = driver.ops_log_handle();

        DbTest {
            db: builder.build(driver),
            ops_log,
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Get the operations log for assertions
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}

/// Installs a `tracing` subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
