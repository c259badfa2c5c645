#[cfg(test)]
mod common;

#[cfg(test)]
mod gateway_tests;

#[cfg(test)]
mod startup_tests;

#[cfg(test)]
mod branding_tests;

#[cfg(test)]
mod wizard_tests;

#[cfg(test)]
mod panel_tests;
