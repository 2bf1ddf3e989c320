mod unit_models_serialization;
