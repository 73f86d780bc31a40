mod appointment;
mod salon_service;
