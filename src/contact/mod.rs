use crate::reactor::{ComponentResponse, ContactEvent, Event};

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
	Name,
	Email,
	Phone,
	Message,
}

impl ContactField {
	pub fn label(&self) -> &'static str {
		match self {
			ContactField::Name => "Full Name",
			ContactField::Email => "Email",
			ContactField::Phone => "Phone",
			ContactField::Message => "Message",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("{} is required", .0.label())]
	Missing(ContactField),
	#[error("'{0}' is not a valid email address")]
	InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub message: String,
}

impl ContactForm {
	pub fn field(&self, field: ContactField) -> &str {
		match field {
			ContactField::Name => &self.name,
			ContactField::Email => &self.email,
			ContactField::Phone => &self.phone,
			ContactField::Message => &self.message,
		}
	}

	fn field_mut(&mut self, field: ContactField) -> &mut String {
		match field {
			ContactField::Name => &mut self.name,
			ContactField::Email => &mut self.email,
			ContactField::Phone => &mut self.phone,
			ContactField::Message => &mut self.message,
		}
	}

	pub fn validate(&self) -> Result<(), FormError> {
		for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
			if self.field(field).trim().is_empty() {
				return Err(FormError::Missing(field));
			}
		}
		let email = self.email.trim();
		let plausible = email
			.split_once('@')
			.is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
		if !plausible || email.contains(char::is_whitespace) {
			return Err(FormError::InvalidEmail(email.to_string()));
		}
		Ok(())
	}
}

/// Contact form state. Submitting only acknowledges, nothing is sent.
pub struct ContactDesk {
	open: bool,
	form: ContactForm,
	error: Option<FormError>,
	acknowledgement: Option<&'static str>,
}

impl ContactDesk {
	pub fn new() -> Self {
		Self {
			open: false,
			form: ContactForm::default(),
			error: None,
			acknowledgement: None,
		}
	}

	pub fn handle(&mut self, event: &Event) -> ComponentResponse {
		match event {
			Event::Contact(ContactEvent::Open) => {
				self.open = true;
				self.error = None;
			}
			Event::Contact(ContactEvent::Close) => {
				self.open = false;
				self.error = None;
			}
			Event::Contact(ContactEvent::Edit { field, value }) => {
				*self.form.field_mut(*field) = value.clone();
			}
			Event::Contact(ContactEvent::Submit) => self.submit(),
			Event::Contact(ContactEvent::Acknowledge) => {
				self.acknowledgement = None;
			}
			_ => {}
		}
		ComponentResponse::none()
	}

	fn submit(&mut self) {
		if let Err(e) = self.form.validate() {
			log::warn!("Contact form rejected: {}", e);
			self.error = Some(e);
			return;
		}
		log::info!(
			"Contact form submitted: name='{}', email='{}', phone='{}', message_len={}",
			self.form.name.trim(),
			self.form.email.trim(),
			self.form.phone.trim(),
			self.form.message.len()
		);
		self.form = ContactForm::default();
		self.error = None;
		self.open = false;
		self.acknowledgement = Some(ACKNOWLEDGEMENT);
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn form(&self) -> &ContactForm {
		&self.form
	}

	pub fn error(&self) -> Option<&FormError> {
		self.error.as_ref()
	}

	pub fn acknowledgement(&self) -> Option<&'static str> {
		self.acknowledgement
	}
}

impl Default for ContactDesk {
	fn default() -> Self {
		Self::new()
	}
}
