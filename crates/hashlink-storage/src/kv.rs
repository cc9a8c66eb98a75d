use async_trait::async_trait;
use hashlink_core::error::StorageError;
use hashlink_core::repository::{ReadRepository, Repository, Result, UrlRecord};
use hashlink_core::shortcode::ShortCode;
use redb::{Database, ReadableTable, TableDefinition, TableError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Each namespace is a redb table of string keys to string values.
///
/// redb panics on an empty table name, so the name is checked first.
fn namespace_table(namespace: &str) -> Result<TableDefinition<'_, &'static str, &'static str>> {
    if namespace.is_empty() {
        return Err(StorageError::InvalidNamespace(
            "namespace must not be empty".to_string(),
        ));
    }
    Ok(TableDefinition::new(namespace))
}

/// Single-file key-value store partitioned into named namespaces.
///
/// Backed by redb: one write transaction at a time, readers see a consistent
/// snapshot and never block on the writer. A write is durable and visible to
/// later reads once [`KvStore::put`] returns.
///
/// Cloning is cheap and every clone shares the same open database.
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Database>,
    path: PathBuf,
}

impl KvStore {
    /// Opens the store at `path`, creating the file if it does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let db = Database::create(&path).map_err(map_redb_error)?;
        debug!(path = %path.display(), "opened key-value store");

        Ok(Self {
            db: Arc::new(db),
            path,
        })
    }

    /// Upserts `key` in `namespace`, creating the namespace if needed.
    pub fn put(&self, namespace: &str, key: &str, value: &str) -> Result<()> {
        let table_definition = namespace_table(namespace)?;
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(table_definition)
                .map_err(map_redb_error)?;
            table.insert(key, value).map_err(map_redb_error)?;
        }
        write_txn
            .commit()
            .map_err(|e| StorageError::Commit(e.to_string()))?;

        trace!(namespace, key, "committed write");
        Ok(())
    }

    /// Looks up `key` in `namespace`.
    ///
    /// A namespace that was never written is treated like a missing key.
    pub fn get(&self, namespace: &str, key: &str) -> Result<Option<String>> {
        let table_definition = namespace_table(namespace)?;
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StorageError::Transaction(e.to_string()))?;

        let table = match read_txn.open_table(table_definition) {
            Ok(table) => table,
            Err(TableError::TableDoesNotExist(_)) => {
                trace!(namespace, "namespace does not exist");
                return Ok(None);
            }
            Err(err) => return Err(map_redb_error(err)),
        };

        let value = table.get(key).map_err(map_redb_error)?;
        Ok(value.map(|guard| guard.value().to_owned()))
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for KvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStore").field("path", &self.path).finish()
    }
}

fn map_redb_error(err: impl Into<redb::Error>) -> StorageError {
    let err: redb::Error = err.into();
    let message = err.to_string();

    match err {
        redb::Error::DatabaseAlreadyOpen | redb::Error::Io(_) => StorageError::Unavailable(message),
        redb::Error::Corrupted(_)
        | redb::Error::UpgradeRequired(_)
        | redb::Error::TableTypeMismatch { .. } => StorageError::InvalidData(message),
        _ => StorageError::Operation(message),
    }
}

/// Repository view of one namespace inside a [`KvStore`].
///
/// redb calls block on file I/O, so they run on tokio's blocking pool.
#[derive(Debug, Clone)]
pub struct KvRepository {
    store: KvStore,
    namespace: Arc<str>,
}

impl KvRepository {
    /// Binds `store` to `namespace`. An empty namespace is rejected.
    pub fn new(store: KvStore, namespace: impl Into<Arc<str>>) -> Result<Self> {
        let namespace = namespace.into();
        namespace_table(&namespace)?;

        Ok(Self { store, namespace })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &KvStore {
        &self.store
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Operation(format!("storage task failed: {e}")))?
}

#[async_trait]
impl ReadRepository for KvRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<UrlRecord>> {
        let store = self.store.clone();
        let namespace = Arc::clone(&self.namespace);
        let key = code.as_str().to_owned();

        let value = run_blocking(move || store.get(&namespace, &key)).await?;
        Ok(value.map(UrlRecord::new))
    }
}

#[async_trait]
impl Repository for KvRepository {
    async fn upsert(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        let store = self.store.clone();
        let namespace = Arc::clone(&self.namespace);
        let key = code.as_str().to_owned();

        run_blocking(move || store.put(&namespace, &key, &record.original_url)).await
    }
}
