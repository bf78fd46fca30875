//! Reference dataset row, deserialized straight from the churn CSV headers.

use serde::{Deserialize, Serialize};
use crate::logic::customer::CustomerRecord;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CustomerRow {
    #[serde(rename = "CustomerId")]
    pub customer_id: u64,
    #[serde(rename = "Surname")]
    pub surname: String,
    #[serde(rename = "CreditScore")]
    pub credit_score: i32,
    #[serde(rename = "Geography")]
    pub geography: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: i32,
    #[serde(rename = "Tenure")]
    pub tenure: i32,
    #[serde(rename = "Balance")]
    pub balance: f64,
    #[serde(rename = "NumOfProducts")]
    pub num_products: i32,
    #[serde(rename = "HasCrCard")]
    pub has_cr_card: u8,
    #[serde(rename = "IsActiveMember")]
    pub is_active_member: u8,
    #[serde(rename = "EstimatedSalary")]
    pub estimated_salary: f64,
    /// 0/1 churn label
    #[serde(rename = "Exited")]
    pub exited: u8,
}

impl CustomerRow {
    pub fn has_churned(&self) -> bool {
        self.exited == 1
    }

    /// Default attribute set for a prediction request; the presentation
    /// layer starts from these values and may edit any field.
    pub fn to_customer_record(&self) -> CustomerRecord {
        CustomerRecord {
            credit_score: self.credit_score,
            geography: self.geography.clone(),
            gender: self.gender.clone(),
            age: self.age,
            tenure: self.tenure,
            balance: self.balance,
            num_products: self.num_products,
            has_credit_card: self.has_cr_card == 1,
            is_active_member: self.is_active_member == 1,
            estimated_salary: self.estimated_salary,
            surname: self.surname.clone(),
        }
    }
}
