mod home;
pub use home::Home;

mod pages;
pub use pages::{
    About, Cart, Contact, CourseList, Deposit, Login, NotFound, Signup, UploadTutorCertificate,
    UserProfile,
};
