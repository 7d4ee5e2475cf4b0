pub mod common;

pub mod err;

pub mod portfolio_projects;

pub mod validation;

pub mod video_projects;
