/// All database primary keys are PostgreSQL BIGINT/BIGSERIAL.
pub type DbId = i64;
