// created_at/updated_at/deleted_at are audit and soft-delete columns; reads skip rows with deleted_at set.
pub const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS customers ( \
    id TEXT PRIMARY KEY, \
    name TEXT NOT NULL, \
    email VARCHAR(50) NOT NULL, \
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(), \
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(), \
    deleted_at TIMESTAMPTZ \
); \
CREATE UNIQUE INDEX IF NOT EXISTS idx_customers_email ON customers (email); \
CREATE TABLE IF NOT EXISTS shipments ( \
    id TEXT PRIMARY KEY, \
    customer_id TEXT NOT NULL, \
    origin TEXT NOT NULL, \
    destination TEXT NOT NULL, \
    weight DOUBLE PRECISION NOT NULL, \
    price DOUBLE PRECISION NOT NULL, \
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(), \
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(), \
    deleted_at TIMESTAMPTZ \
); \
CREATE INDEX IF NOT EXISTS idx_shipments_customer_id ON shipments (customer_id); \
";
