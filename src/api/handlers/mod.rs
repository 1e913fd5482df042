pub mod db_test;
pub mod home;
