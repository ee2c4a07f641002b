mod health_check;
mod helpers;
mod logout;
mod postgres;
