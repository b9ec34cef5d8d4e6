#[cfg(test)]
mod common;

// Calculation core
#[cfg(test)]
mod calendar_tests;


#[cfg(test)]
mod adjustment_tests;




// Caseload
#[cfg(test)]
mod normalize_tests;


// REST
#[cfg(test)]
mod speedy_trial_api_tests;
