
#[cfg(test)]
mod access_guard_tests;

#[cfg(test)]
mod search_driver_tests;


#[cfg(test)]
mod api_client_tests;
