use rusqlite::Row;

/// Maps a row selected with named columns onto a model.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
