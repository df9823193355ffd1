use crate::domain::user::{UpdateProfile, UserProfile};
use crate::dto::profile::ProfilePageData;
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::forms::profile::ProfileForm;
use crate::repository::{PlaceReader, ProfileStore, WishlistStore};
use crate::services::places::load_wishlist;
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;

/// Creates a profile from the sign-up form and signs it in.
pub fn sign_up<R>(repo: &R, session: &mut SessionContext, form: SignUpForm) -> ServiceResult<UserProfile>
where
    R: ProfileStore + ?Sized,
{
    let profile = UserProfile::try_from(form)?;
    let profile = session.sign_in(repo, profile).map_err(|err| {
        log::error!("Failed to store profile: {err}");
        err
    })?;

    log::info!("Signed up {}", profile.email);
    Ok(profile.clone())
}

/// Signs in a returning user.
///
/// Credentials are not checked against anything: a well-formed email and
/// password are enough.
pub fn sign_in<R>(repo: &R, session: &mut SessionContext, form: SignInForm) -> ServiceResult<UserProfile>
where
    R: ProfileStore + ?Sized,
{
    let profile = UserProfile::try_from(form)?;
    let profile = session.sign_in(repo, profile).map_err(|err| {
        log::error!("Failed to store profile: {err}");
        err
    })?;

    log::info!("Signed in {}", profile.email);
    Ok(profile.clone())
}

pub fn sign_out<R>(repo: &R, session: &mut SessionContext) -> ServiceResult<()>
where
    R: ProfileStore + ?Sized,
{
    session.sign_out(repo).map_err(|err| {
        log::error!("Failed to clear profile: {err}");
        ServiceError::from(err)
    })
}

pub fn update_profile<R>(
    repo: &R,
    session: &mut SessionContext,
    form: ProfileForm,
) -> ServiceResult<UserProfile>
where
    R: ProfileStore + ?Sized,
{
    if !session.is_signed_in() {
        return Err(ServiceError::Unauthorized);
    }

    let update = UpdateProfile::try_from(form)?;
    let profile = session.update(repo, update).map_err(|err| {
        log::error!("Failed to update profile: {err}");
        err
    })?;

    Ok(profile.clone())
}

/// Profile of the signed-in user with their wishlisted places.
pub fn load_profile_page<R>(repo: &R, session: &SessionContext) -> ServiceResult<ProfilePageData>
where
    R: PlaceReader + WishlistStore + ?Sized,
{
    let profile = session.profile().cloned().ok_or(ServiceError::Unauthorized)?;
    let wishlist = load_wishlist(repo)?;

    Ok(ProfilePageData { profile, wishlist })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn sign_up_form(name: &str) -> SignUpForm {
        SignUpForm {
            full_name: name.into(),
            email: "Sam@Example.com".into(),
            password: "secret1".into(),
            location: "Lisbon".into(),
        }
    }

    fn profile_form() -> ProfileForm {
        ProfileForm {
            name: "Sam Rivera".into(),
            location: "Porto".into(),
            bio: Some("Coffee and trains".into()),
            currently_traveling: true,
            current_trip: Some("Douro Valley".into()),
        }
    }

    #[test]
    fn sign_up_stores_profile() {
        let mut repo = MockRepository::new();
        repo.expect_save_profile()
            .withf(|p| p.name == "Sam Rivera" && p.email == "sam@example.com")
            .times(1)
            .returning(|_| Ok(()));
        let mut session = SessionContext::anonymous();

        let profile = sign_up(&repo, &mut session, sign_up_form("Sam Rivera")).expect("signed up");

        assert_eq!(profile.location, "Lisbon");
        assert_eq!(session.display_name(), Some("Sam Rivera"));
    }

    #[test]
    fn sign_up_rejects_short_name() {
        let mut repo = MockRepository::new();
        repo.expect_save_profile().times(0);
        let mut session = SessionContext::anonymous();

        let result = sign_up(&repo, &mut session, sign_up_form(" S "));

        assert!(matches!(result, Err(ServiceError::Form(_))));
        assert!(!session.is_signed_in());
    }

    #[test]
    fn sign_in_rejects_short_password() {
        let mut repo = MockRepository::new();
        repo.expect_save_profile().times(0);
        let mut session = SessionContext::anonymous();
        let form = SignInForm {
            email: "sam@example.com".into(),
            password: "123".into(),
        };

        let result = sign_in(&repo, &mut session, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn update_requires_sign_in() {
        let mut repo = MockRepository::new();
        repo.expect_save_profile().times(0);
        let mut session = SessionContext::anonymous();

        let result = update_profile(&repo, &mut session, profile_form());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn update_and_sign_out() {
        let mut repo = MockRepository::new();
        repo.expect_save_profile().times(2).returning(|_| Ok(()));
        repo.expect_clear_profile().times(1).returning(|| Ok(()));
        let mut session = SessionContext::anonymous();
        sign_in(
            &repo,
            &mut session,
            SignInForm {
                email: "sam@example.com".into(),
                password: "secret1".into(),
            },
        )
        .expect("signed in");

        let updated = update_profile(&repo, &mut session, profile_form()).expect("updated");
        assert_eq!(updated.current_trip.as_deref(), Some("Douro Valley"));

        sign_out(&repo, &mut session).expect("signed out");
        assert!(!session.is_signed_in());
    }

    #[test]
    fn profile_page_requires_sign_in() {
        let repo = MockRepository::new();
        let session = SessionContext::anonymous();

        let result = load_profile_page(&repo, &session);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
