mod admin;
mod donor;
mod hist_blood;
mod locality;
mod scheduling;
mod stock;
