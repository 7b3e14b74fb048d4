extern crate pretzel;
use pretzel::rpassword::*;

struct User {
    // ...
    password_hash: String,
}

fn auth_user(user: &User) {
    let password = prompt_password_stdout("Enter password:").unwrap();
    if pretzel::verify_password(&user.password_hash, password).unwrap_or(false) {
        println!("The password is correct!");
        // ~> Handle correct password
    } else {
        println!("Incorrect password.");
        // ~> Handle incorrect password
    }
}


fn main() {
    let user = User {
        password_hash: pretzel::hash_password("hunter2").expect("failed to hash password"),
    };
    auth_user(&user);
}
