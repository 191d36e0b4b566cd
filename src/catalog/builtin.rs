use super::{
	Catalog, CatalogError, CatalogFile, ClientKey, ClientProfile, MediaRef, ProjectDetail, Service,
	Slide, SlideDetail, Stat,
};
use indexmap::IndexMap;

const BLUE: [u8; 3] = [59, 130, 246];
const GREEN: [u8; 3] = [34, 197, 94];
const RED: [u8; 3] = [239, 68, 68];
const PURPLE: [u8; 3] = [168, 85, 247];
const ORANGE: [u8; 3] = [249, 115, 22];
const YELLOW: [u8; 3] = [234, 179, 8];

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

fn profile(
	name: &str,
	specialization: &str,
	description: &str,
	since: i32,
	projects: &[&str],
) -> ClientProfile {
	ClientProfile {
		name: name.to_string(),
		specialization: specialization.to_string(),
		description: description.to_string(),
		location: "Johannesburg, South Africa".to_string(),
		since,
		projects: strings(projects),
	}
}

fn profiles() -> IndexMap<ClientKey, ClientProfile> {
	let mut profiles = IndexMap::new();
	profiles.insert(
		ClientKey::AvengGroup,
		profile(
			"Aveng Group",
			"Large-scale Infrastructure & Mining",
			"A leading infrastructure and resources group with operations across Africa, Australia, and Southeast Asia.",
			2000,
			&["Mooikloof Mega City", "Gautrain Rapid Rail", "Medupi Power Station"],
		),
	);
	profiles.insert(
		ClientKey::MurrayRoberts,
		profile(
			"Murray & Roberts",
			"Engineering & Construction",
			"A multinational engineering and construction company with expertise in underground mining, oil and gas, and infrastructure.",
			1902,
			&["Bokpoort CSP Plant", "Gauteng Freeway Improvement", "Sasol Mining Operations"],
		),
	);
	profiles.insert(
		ClientKey::Wbho,
		profile(
			"WBHO Construction",
			"Building & Civil Engineering",
			"One of the largest construction companies in South Africa with significant international presence in Australia and UK.",
			1970,
			&["Moses Mabhida Stadium", "Gateway Theatre of Shopping", "Pearl Qatar"],
		),
	);
	profiles.insert(
		ClientKey::StefanuttiStocks,
		profile(
			"Stefanutti Stocks",
			"Multi-disciplinary Construction",
			"A multi-disciplinary construction company offering services across building, civil engineering, and roads earthworks.",
			1976,
			&["King Shaka International Airport", "Menlyn Maine Precinct", "Durban Container Terminal"],
		),
	);
	profiles.insert(
		ClientKey::GroupFive,
		profile(
			"Group Five",
			"Construction & Infrastructure",
			"A diversified construction, materials, and infrastructure investments group with operations across Africa.",
			1974,
			&["Kusile Power Station", "Nelson Mandela Bridge", "Mozal Aluminium Smelter"],
		),
	);
	profiles
}

fn client_slides(profiles: &IndexMap<ClientKey, ClientProfile>) -> Vec<Slide> {
	let accents = [BLUE, GREEN, RED, PURPLE, ORANGE];
	profiles
		.iter()
		.zip(accents)
		.map(|((key, profile), accent)| Slide {
			title: profile.name.clone(),
			description: profile.specialization.clone(),
			media: MediaRef::image(None),
			accent,
			detail: SlideDetail::Client { client: *key },
		})
		.collect()
}

fn work_slide(
	title: &str,
	description: &str,
	media: MediaRef,
	accent: [u8; 3],
	location: &str,
	completed: i32,
	scope: &[&str],
) -> Slide {
	Slide {
		title: title.to_string(),
		description: description.to_string(),
		media,
		accent,
		detail: SlideDetail::Project(ProjectDetail {
			location: location.to_string(),
			completed: Some(completed),
			scope: strings(scope),
		}),
	}
}

fn work_slides() -> Vec<Slide> {
	vec![
		work_slide(
			"Factory Teardown",
			"Full structural dismantling of a disused manufacturing plant.",
			MediaRef::image(None),
			ORANGE,
			"Germiston",
			2022,
			&["Structural dismantling", "Debris management", "Site clearance"],
		),
		work_slide(
			"Controlled Implosion",
			"Twelve-storey office block brought down in a single sequence.",
			MediaRef::video(None),
			YELLOW,
			"Pretoria",
			2023,
			&["Controlled implosions", "Exclusion zone planning"],
		),
		work_slide(
			"Residential Clearance",
			"House demolition and swimming pool removal ahead of redevelopment.",
			MediaRef::image(None),
			RED,
			"Sandton",
			2024,
			&["House demolitions", "Swimming pool removal", "Site preparation"],
		),
		work_slide(
			"Silo Removal",
			"Dismantling of grain silos with full material recycling.",
			MediaRef::video(None),
			GREEN,
			"Durban",
			2021,
			&["Material recycling", "Heavy lift", "Debris management"],
		),
	]
}

fn other_clients() -> Vec<String> {
	strings(&[
		"Basil Read",
		"Raubex Group",
		"Concor",
		"Wilson Bayly",
		"Grinaker-LTA",
		"Liviero Group",
		"Shaft Sinkers",
		"Esor Construction",
		"Haw & Inglis",
		"Matomo Projects",
		"Bombela Civils",
		"Hlahatsi Group",
		"Franki Africa",
		"Esorfranki",
		"Mzansi Civil",
		"Civils 2000",
		"Roadmac",
		"KWV Construction",
		"Umso Construction",
		"Khato Civils",
		"Nyeleti Consulting",
		"Umhlaba Consulting",
		"NMC Construction",
		"Tenza Holdings",
		"BKS Projects",
	])
}

fn service(title: &str, description: &str, features: &[&str]) -> Service {
	Service {
		title: title.to_string(),
		description: description.to_string(),
		features: strings(features),
	}
}

fn stat(number: &str, label: &str) -> Stat {
	Stat {
		number: number.to_string(),
		label: label.to_string(),
	}
}

/// Compiled-in content, validated the same way as a catalog file
pub(super) fn catalog() -> Result<Catalog, CatalogError> {
	let profiles = profiles();
	Catalog::from_file(CatalogFile {
		clients: client_slides(&profiles),
		work: work_slides(),
		profiles,
		other_clients: other_clients(),
		core_services: vec![
			service(
				"Commercial Demolition",
				"Large-scale demolition of commercial buildings, factories, and industrial structures with precision and safety.",
				&["Structural dismantling", "Controlled implosions", "Site clearance", "Debris management"],
			),
			service(
				"Residential Demolition",
				"Professional demolition of residential properties with minimal disruption to surrounding areas.",
				&["House demolitions", "Swimming pool removal", "Outbuilding clearance", "Site preparation"],
			),
		],
		additional_services: vec![
			service(
				"Site Preparation",
				"Complete site preparation and clearance services for new construction projects.",
				&[],
			),
			service(
				"Safety Consulting",
				"Expert safety assessments and consulting for demolition and construction sites.",
				&[],
			),
			service(
				"Recycling & Disposal",
				"Environmentally responsible disposal and recycling of demolition materials.",
				&[],
			),
		],
		stats: vec![
			stat("500+", "Projects Completed"),
			stat("20+", "Years Experience"),
			stat("100%", "Safety Record"),
			stat("50+", "Expert Team"),
		],
	})
}
