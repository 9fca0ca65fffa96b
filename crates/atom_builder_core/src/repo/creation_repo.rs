//! Creation repository contract and SQLite implementation.
//!
//! # Invariants
//! - Owner listings are newest first.
//! - Public listings are ordered by user name, then newest first.
//! - Ties break on `id` so pagination is deterministic.

use crate::db::DbError;
use crate::model::creation::{Creation, CreationId, CreationValidationError};
use crate::model::stability::StabilityStatus;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CREATION_COLUMNS: &str = "id, user_id, user_name, name, protons, neutrons, electrons,
    is_antimatter, is_public, stability, predicted, published_at";

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Validation(CreationValidationError),
    Db(DbError),
    NotFound(CreationId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "creation not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid stored creation: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<CreationValidationError> for RepoError {
    fn from(value: CreationValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Listing filter and page window.
#[derive(Debug, Clone, Default)]
pub struct CreationListQuery {
    /// Restrict to one owner's creations.
    pub owner: Option<String>,
    /// Restrict to publicly listed creations.
    pub public_only: bool,
    pub limit: Option<u32>,
    pub offset: u32,
}

impl CreationListQuery {
    /// One user's creations, public or private.
    pub fn owned_by(user_id: impl Into<String>) -> Self {
        Self {
            owner: Some(user_id.into()),
            ..Self::default()
        }
    }

    /// The public gallery.
    pub fn public() -> Self {
        Self {
            public_only: true,
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

pub trait CreationRepository {
    fn create_creation(&self, creation: &Creation) -> RepoResult<CreationId>;
    fn get_creation(&self, id: CreationId) -> RepoResult<Option<Creation>>;
    fn list_creations(&self, query: &CreationListQuery) -> RepoResult<Vec<Creation>>;
    fn delete_creation(&self, id: CreationId) -> RepoResult<()>;
}

pub struct SqliteCreationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCreationRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CreationRepository for SqliteCreationRepository<'_> {
    fn create_creation(&self, creation: &Creation) -> RepoResult<CreationId> {
        creation.validate()?;

        self.conn.execute(
            &format!(
                "INSERT INTO creations ({CREATION_COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12);"
            ),
            params![
                creation.id.to_string(),
                creation.user_id.as_str(),
                creation.user_name.as_str(),
                creation.name.as_str(),
                creation.protons,
                creation.neutrons,
                creation.electrons,
                creation.is_antimatter,
                creation.is_public,
                creation.stability.as_str(),
                creation.predicted,
                creation.published_at,
            ],
        )?;

        Ok(creation.id)
    }

    fn get_creation(&self, id: CreationId) -> RepoResult<Option<Creation>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {CREATION_COLUMNS} FROM creations WHERE id = ?1;"),
                [id.to_string()],
                |row| Ok(read_row(row)),
            )
            .optional()?;

        row.transpose()
    }

    fn list_creations(&self, query: &CreationListQuery) -> RepoResult<Vec<Creation>> {
        let mut sql = format!("SELECT {CREATION_COLUMNS} FROM creations WHERE 1 = 1");
        let mut binds: Vec<Value> = Vec::new();

        if let Some(owner) = &query.owner {
            sql.push_str(" AND user_id = ?");
            binds.push(Value::Text(owner.clone()));
        }
        if query.public_only {
            sql.push_str(" AND is_public = 1");
        }

        if query.public_only && query.owner.is_none() {
            sql.push_str(" ORDER BY user_name ASC, published_at DESC, id ASC");
        } else {
            sql.push_str(" ORDER BY published_at DESC, id ASC");
        }

        match (query.limit, query.offset) {
            (Some(limit), offset) => {
                sql.push_str(" LIMIT ? OFFSET ?");
                binds.push(Value::Integer(i64::from(limit)));
                binds.push(Value::Integer(i64::from(offset)));
            }
            (None, 0) => {}
            (None, offset) => {
                sql.push_str(" LIMIT -1 OFFSET ?");
                binds.push(Value::Integer(i64::from(offset)));
            }
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(binds))?;
        let mut creations = Vec::new();
        while let Some(row) = rows.next()? {
            creations.push(read_row(row)?);
        }
        Ok(creations)
    }

    fn delete_creation(&self, id: CreationId) -> RepoResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM creations WHERE id = ?1;", [id.to_string()])?;
        if removed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn read_row(row: &Row<'_>) -> RepoResult<Creation> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("bad id `{id_text}`")))?;

    let stability_text: String = row.get("stability")?;
    let stability = StabilityStatus::parse(&stability_text)
        .ok_or_else(|| RepoError::InvalidData(format!("bad stability `{stability_text}`")))?;

    let creation = Creation {
        id,
        user_id: row.get("user_id")?,
        user_name: row.get("user_name")?,
        name: row.get("name")?,
        protons: read_count(row, "protons")?,
        neutrons: read_count(row, "neutrons")?,
        electrons: read_count(row, "electrons")?,
        is_antimatter: read_flag(row, "is_antimatter")?,
        is_public: read_flag(row, "is_public")?,
        stability,
        predicted: read_flag(row, "predicted")?,
        published_at: row.get("published_at")?,
    };
    creation.validate()?;
    Ok(creation)
}

fn read_count(row: &Row<'_>, column: &str) -> RepoResult<u32> {
    let value: i64 = row.get(column)?;
    u32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("bad {column} count `{value}`")))
}

fn read_flag(row: &Row<'_>, column: &str) -> RepoResult<bool> {
    match row.get::<_, i64>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!("bad {column} flag `{other}`"))),
    }
}
