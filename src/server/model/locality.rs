use crate::{
    model::locality::{LocalityDto, LocalityPayloadDto},
    server::{error::validation::ValidationErrors, util::validate},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Locality {
    pub id: i32,
    pub street: String,
    pub neighborhood: String,
    pub zip: String,
    pub city: String,
    pub state: String,
}

impl Locality {
    pub fn from_entity(entity: entity::locality::Model) -> Self {
        Self {
            id: entity.id,
            street: entity.street,
            neighborhood: entity.neighborhood,
            zip: entity.zip,
            city: entity.city,
            state: entity.state,
        }
    }

    pub fn into_dto(self) -> LocalityDto {
        LocalityDto {
            id: self.id,
            street: self.street,
            neighborhood: self.neighborhood,
            zip: self.zip,
            city: self.city,
            state: self.state,
        }
    }
}

/// Address fields for creating or replacing a locality; all are required.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalityParams {
    pub street: String,
    pub neighborhood: String,
    pub zip: String,
    pub city: String,
    pub state: String,
}

impl LocalityParams {
    pub fn from_dto(dto: LocalityPayloadDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let street = validate::required(&mut errors, "street", dto.street, "street is required");
        let neighborhood = validate::required(
            &mut errors,
            "neighborhood",
            dto.neighborhood,
            "neighborhood is required",
        );
        let zip = validate::required(&mut errors, "zip", dto.zip, "zip is required");
        let city = validate::required(&mut errors, "city", dto.city, "city is required");
        let state = validate::required(&mut errors, "state", dto.state, "state is required");

        let (Some(street), Some(neighborhood), Some(zip), Some(city), Some(state)) =
            (street, neighborhood, zip, city, state)
        else {
            return Err(errors);
        };

        Ok(Self {
            street,
            neighborhood,
            zip,
            city,
            state,
        })
    }
}
