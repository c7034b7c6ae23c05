pub mod galaxy_view;
