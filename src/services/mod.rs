// Business logic services layer, reusable across the role views.

pub mod classify;
