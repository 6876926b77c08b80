mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod protected;
pub use protected::Protected;

mod home;
pub use home::Home;

mod create_post;
pub use create_post::CreatePost;
