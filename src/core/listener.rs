// Listener setup and classification of bind failures

use std::{fmt, io};
use listenfd::ListenFd;
use tokio::net::TcpListener;

use crate::config::environment::EnvironmentVariables;

/// What the server binds to, as it appears in log messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
    Port(u16),
    /// Socket handed over by systemfd / listenfd, by index
    Inherited(usize),
}

impl fmt::Display for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Port(port) => write!(f, "Port {port}"),
            Self::Inherited(index) => write!(f, "Inherited socket {index}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListenError {
    #[error("{bind} requires elevated privileges")]
    ElevatedPrivileges {
        bind: Bind,
        #[source]
        source: io::Error,
    },

    #[error("{bind} is already in use")]
    AddressInUse {
        bind: Bind,
        #[source]
        source: io::Error,
    },

    #[error("Failed to listen on {bind}: {source}")]
    Io {
        bind: Bind,
        #[source]
        source: io::Error,
    },
}

impl ListenError {
    pub fn classify(bind: Bind, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::ElevatedPrivileges { bind, source },
            io::ErrorKind::AddrInUse => Self::AddressInUse { bind, source },
            _ => Self::Io { bind, source },
        }
    }

    /// Known bind failures are logged and end the process with exit code 1;
    /// anything else is left to propagate as a fatal error.
    pub fn is_known_bind_failure(&self) -> bool {
        matches!(
            self,
            Self::ElevatedPrivileges { .. } | Self::AddressInUse { .. }
        )
    }
}

/// Takes an inherited socket when one was passed in, otherwise binds HOST:PORT
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener, ListenError> {
    let mut listenfd: ListenFd = ListenFd::from_env();
    let inherited = |err: io::Error| ListenError::classify(Bind::Inherited(0), err);

    match listenfd.take_tcp_listener(0).map_err(inherited)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true).map_err(inherited)?;
            TcpListener::from_std(std_listener).map_err(inherited)
        }
        None => bind_port(&env.host, env.port).await,
    }
}

pub async fn bind_port(host: &str, port: u16) -> Result<TcpListener, ListenError> {
    TcpListener::bind((host, port))
        .await
        .map_err(|err| ListenError::classify(Bind::Port(port), err))
}
