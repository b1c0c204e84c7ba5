//! Repositorio de bills
//!
//! Las facturas se insertan una vez y nunca se actualizan.

use sqlx::PgPool;

use crate::models::Bill;
use crate::utils::errors::AppError;

pub struct BillRepository {
    pool: PgPool,
}

impl BillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, bill: &Bill) -> Result<Bill, AppError> {
        let result = sqlx::query_as::<_, Bill>(
            r#"
            INSERT INTO bills (
                id, driver_email, customer_name, phone, pickup_location,
                drop_location, pickup_date, pickup_time, trip_type, car,
                start_meter, end_meter, total_km, final_km, km_price,
                total_km_price, luggage_charge, pet_charge, toll_charge,
                hills_charge, betta_charge, state_charge, total_entered_charges,
                final_bill, created_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25
            )
            RETURNING *
            "#,
        )
        .bind(bill.id)
        .bind(&bill.driver_email)
        .bind(&bill.customer_name)
        .bind(&bill.phone)
        .bind(&bill.pickup_location)
        .bind(&bill.drop_location)
        .bind(&bill.pickup_date)
        .bind(&bill.pickup_time)
        .bind(&bill.trip_type)
        .bind(&bill.car)
        .bind(bill.start_meter)
        .bind(bill.end_meter)
        .bind(bill.total_km)
        .bind(bill.final_km)
        .bind(bill.km_price)
        .bind(bill.total_km_price)
        .bind(bill.luggage_charge)
        .bind(bill.pet_charge)
        .bind(bill.toll_charge)
        .bind(bill.hills_charge)
        .bind(bill.betta_charge)
        .bind(bill.state_charge)
        .bind(bill.total_entered_charges)
        .bind(bill.final_bill)
        .bind(bill.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_for_driver(&self, driver_email: &str) -> Result<Vec<Bill>, AppError> {
        let bills = sqlx::query_as::<_, Bill>(
            "SELECT * FROM bills WHERE driver_email = $1 ORDER BY created_at DESC",
        )
        .bind(driver_email)
        .fetch_all(&self.pool)
        .await?;

        Ok(bills)
    }

    pub async fn list_all(&self) -> Result<Vec<Bill>, AppError> {
        let bills = sqlx::query_as::<_, Bill>("SELECT * FROM bills ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(bills)
    }
}
