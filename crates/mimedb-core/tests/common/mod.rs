pub mod db_server;
