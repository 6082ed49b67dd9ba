//! Diesel table definitions for the clinic PostgreSQL schema.
//!
//! The schema and its migrations are owned outside this crate; these
//! declarations must track them column for column.

diesel::table! {
    /// Registered patients.
    users (id) {
        id -> Int4,
        /// Unique login email.
        email -> Varchar,
        /// Lowercase hex SHA-256 of the password.
        password_hash -> Varchar,
        full_name -> Varchar,
        /// Empty string when not supplied at registration.
        phone -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    doctors (id) {
        id -> Int4,
        full_name -> Varchar,
        specialization -> Varchar,
        experience_years -> Int4,
        photo_url -> Nullable<Text>,
        description -> Nullable<Text>,
        /// Only available doctors are listed and assigned.
        available -> Bool,
    }
}

diesel::table! {
    /// Read-only service catalogue.
    services (id) {
        id -> Int4,
        title -> Varchar,
        description -> Nullable<Text>,
        price -> Nullable<Varchar>,
        duration_minutes -> Nullable<Int4>,
    }
}

diesel::table! {
    appointments (id) {
        id -> Int4,
        user_id -> Int4,
        doctor_id -> Nullable<Int4>,
        service_id -> Nullable<Int4>,
        symptoms -> Text,
        /// One of `pending`, `confirmed`, `completed`, `cancelled`.
        status -> Varchar,
        scheduled_date -> Timestamptz,
        /// Database default `now()`.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    faq (id) {
        id -> Int4,
        question -> Text,
        answer -> Text,
        category -> Varchar,
    }
}

diesel::joinable!(appointments -> users (user_id));
diesel::joinable!(appointments -> doctors (doctor_id));
diesel::joinable!(appointments -> services (service_id));

diesel::allow_tables_to_appear_in_same_query!(appointments, doctors, faq, services, users);
