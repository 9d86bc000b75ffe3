/*
    * Request pipeline stages, listed outermost first:
    * - security_headers
    * - cors
    * - access_log
    * - body_parser
*/

pub mod access_log;
pub mod body_parser;
pub mod cors;
pub mod security_headers;
