mod crud_tests;
mod db_tests;
