//! Connection accessor.
//!
//! [`get_connection`] is the zero-argument entry point: it reads the
//! connection settings from the environment and opens a fresh handle.
//! Every call returns a new connection; nothing is cached or pooled.

use crate::config::{ConnectionConfig, Target};
use crate::error::{ConnectionError, Result};
use rusqlite::{Connection, OpenFlags};
use std::any::type_name;

/// Open a connection using [`ConnectionConfig::from_env`].
pub fn get_connection() -> Result<Connection> {
    open(&ConnectionConfig::from_env())
}

/// Open a connection for the given settings.
pub fn open(config: &ConnectionConfig) -> Result<Connection> {
    config.validate()?;
    let target = config.target()?;
    let wrap = |source| ConnectionError::Open {
        url: config.url.clone(),
        source,
    };

    let connection = match &target {
        Target::Memory => {
            if config.read_only {
                tracing::warn!(url = %config.url, "read_only ignored for in-memory database");
            }
            Connection::open_in_memory_with_flags(read_write_flags()).map_err(wrap)?
        }
        Target::File(path) => {
            let flags = if config.read_only {
                read_only_flags()
            } else {
                read_write_flags()
            };
            Connection::open_with_flags(path, flags).map_err(wrap)?
        }
    };
    connection.busy_timeout(config.busy_timeout).map_err(wrap)?;

    tracing::info!(
        url = %config.url,
        connection = ?connection,
        class = type_name::<Connection>(),
        "get connection"
    );
    Ok(connection)
}

/// Whether the handle still answers a trivial query.
pub fn is_valid(connection: &Connection) -> bool {
    connection
        .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map(|one| one == 1)
        .unwrap_or(false)
}

/// Close a connection, surfacing any error the driver reports.
pub fn close(connection: Connection) -> Result<()> {
    connection.close().map_err(|(_, err)| {
        tracing::error!(error = %err, "failed to close connection");
        ConnectionError::Close(err)
    })?;
    tracing::debug!("connection closed");
    Ok(())
}

fn read_write_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX
}

fn read_only_flags() -> OpenFlags {
    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX
}
