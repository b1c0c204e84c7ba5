//! Schema de la base de datos
//!
//! DDL idempotente para las tres colecciones: drivers, trips y bills.
//! Se ejecuta al arrancar el servicio y desde los tests de integración.

use sqlx::PgPool;

/// Crear las tablas si no existen
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS drivers (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            rc_number TEXT NOT NULL UNIQUE,
            fc_expiry TEXT,
            insurance_number TEXT NOT NULL UNIQUE,
            insurance_expiry TEXT,
            driving_license TEXT,
            dl_expiry TEXT,
            status TEXT NOT NULL DEFAULT 'active',
            current_location TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            id UUID PRIMARY KEY,
            pickup_location TEXT,
            drop_location TEXT,
            trip_type TEXT,
            car TEXT,
            pickup_date TEXT,
            pickup_time TEXT,
            days INTEGER NOT NULL DEFAULT 0,
            km NUMERIC NOT NULL DEFAULT 0,
            km_price NUMERIC NOT NULL DEFAULT 0,
            betta NUMERIC NOT NULL DEFAULT 0,
            adult INTEGER NOT NULL DEFAULT 0,
            child INTEGER NOT NULL DEFAULT 0,
            luggage NUMERIC NOT NULL DEFAULT 0,
            phone TEXT,
            state TEXT,
            customer_name TEXT,
            customer_remark TEXT,
            customer_current_location TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            accepted_drivers JSONB NOT NULL DEFAULT '[]'::jsonb,
            driver_email TEXT,
            assigned_at TIMESTAMPTZ,
            start_meter NUMERIC,
            end_meter NUMERIC,
            luggage_charge NUMERIC,
            pet_charge NUMERIC,
            toll_charge NUMERIC,
            hills_charge NUMERIC,
            total_km NUMERIC,
            final_km NUMERIC,
            final_bill NUMERIC,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bills (
            id UUID PRIMARY KEY,
            driver_email TEXT NOT NULL,
            customer_name TEXT NOT NULL,
            phone TEXT,
            pickup_location TEXT,
            drop_location TEXT,
            pickup_date TEXT,
            pickup_time TEXT,
            trip_type TEXT,
            car TEXT,
            start_meter NUMERIC NOT NULL DEFAULT 0,
            end_meter NUMERIC NOT NULL DEFAULT 0,
            total_km NUMERIC NOT NULL DEFAULT 0,
            final_km NUMERIC NOT NULL DEFAULT 0,
            km_price NUMERIC NOT NULL DEFAULT 0,
            total_km_price NUMERIC NOT NULL DEFAULT 0,
            luggage_charge NUMERIC NOT NULL DEFAULT 0,
            pet_charge NUMERIC NOT NULL DEFAULT 0,
            toll_charge NUMERIC NOT NULL DEFAULT 0,
            hills_charge NUMERIC NOT NULL DEFAULT 0,
            betta_charge NUMERIC NOT NULL DEFAULT 0,
            state_charge NUMERIC NOT NULL DEFAULT 0,
            total_entered_charges NUMERIC NOT NULL DEFAULT 0,
            final_bill NUMERIC NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
