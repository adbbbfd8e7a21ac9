mod api;
mod external;
