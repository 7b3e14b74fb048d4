extern crate pretzel;

// We re-export the rpassword crate for CLI password input.
use pretzel::rpassword::*;

fn main() {
    let password = prompt_password_stdout("Please enter your password:").unwrap();
    let password_hash = pretzel::hash_password(password).expect("failed to hash password");
    println!("The hashed password is: '{}'", password_hash);
}
