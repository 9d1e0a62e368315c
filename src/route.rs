use std::fmt;

/// A screen the explorer can show, with its path parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Block(String),
    Transaction(String),
    Address(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Block(num) => format!("/block/{num}"),
            Route::Transaction(hash) => format!("/tx/{hash}"),
            Route::Address(addr) => format!("/address/{addr}"),
        }
    }

    /// Parse `/`, `/block/{n}`, `/tx/{hash}` or `/address/{addr}`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        if path == "/" || path.is_empty() {
            return Some(Route::Home);
        }

        let rest = path.strip_prefix('/')?.trim_end_matches('/');
        let (kind, param) = rest.split_once('/')?;
        if param.is_empty() || param.contains('/') {
            return None;
        }

        match kind {
            "block" => Some(Route::Block(param.to_string())),
            "tx" => Some(Route::Transaction(param.to_string())),
            "address" => Some(Route::Address(param.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
