mod common;
mod draws;
mod french;
mod routing;
