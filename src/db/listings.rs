use crate::db::connection::Database;
use crate::domain::listing::Listing;
use crate::errors::ServerError;

/// Load the entire listings table into memory.
///
/// The dashboard treats the table as immutable for the life of the process:
/// this runs once at startup and the resulting `Vec` is passed by reference
/// to the filter engine and the query catalog.
pub fn load_all(db: &Database) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                r#"
                SELECT
                    id,              -- 0
                    city,            -- 1
                    property_type,   -- 2
                    price,           -- 3
                    sqft,            -- 4
                    agent_id,        -- 5
                    date_listed,     -- 6
                    latitude,        -- 7
                    longitude        -- 8
                FROM listings
                ORDER BY id
                "#,
            )
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Listing {
                    id: row.get(0)?,
                    city: row.get(1)?,
                    property_type: row.get(2)?,
                    price: row.get(3)?,
                    sqft: row.get(4)?,
                    agent_id: row.get(5)?,
                    date_listed: row.get(6)?,
                    latitude: row.get(7)?,
                    longitude: row.get(8)?,
                })
            })
            .map_err(|e| ServerError::DbError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| ServerError::DbError(e.to_string()))?);
        }

        Ok(results)
    })
}

/// Row count of the listings table. Used to decide whether to seed.
pub fn count(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))
            .map_err(|e| ServerError::DbError(e.to_string()))
    })
}
