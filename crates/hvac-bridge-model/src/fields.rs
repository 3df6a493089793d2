// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field indices for the built-in object types
//!
//! Indices past the fixed fields address extensible groups and are given as
//! offsets within one group.

/// Model-layer field indices
pub mod os {
    pub mod schedule_type_limits {
        pub const NAME: usize = 0;
        pub const LOWER_LIMIT_VALUE: usize = 1;
        pub const UPPER_LIMIT_VALUE: usize = 2;
        pub const NUMERIC_TYPE: usize = 3;
        pub const UNIT_TYPE: usize = 4;
    }

    pub mod schedule_constant {
        pub const NAME: usize = 0;
        pub const SCHEDULE_TYPE_LIMITS_NAME: usize = 1;
        pub const VALUE: usize = 2;
    }

    pub mod curve_quadratic {
        pub const NAME: usize = 0;
        pub const COEFFICIENT1_CONSTANT: usize = 1;
        pub const COEFFICIENT2_X: usize = 2;
        pub const COEFFICIENT3_X2: usize = 3;
        pub const MINIMUM_VALUE_OF_X: usize = 4;
        pub const MAXIMUM_VALUE_OF_X: usize = 5;
    }

    pub mod curve_cubic {
        pub const NAME: usize = 0;
        pub const COEFFICIENT1_CONSTANT: usize = 1;
        pub const COEFFICIENT2_X: usize = 2;
        pub const COEFFICIENT3_X2: usize = 3;
        pub const COEFFICIENT4_X3: usize = 4;
        pub const MINIMUM_VALUE_OF_X: usize = 5;
        pub const MAXIMUM_VALUE_OF_X: usize = 6;
    }

    pub mod model_object_list {
        pub const NAME: usize = 0;
        /// Group offset
        pub const MODEL_OBJECT: usize = 0;
    }

    pub mod refrigeration_compressor {
        pub const NAME: usize = 0;
        pub const POWER_CURVE: usize = 1;
        pub const CAPACITY_CURVE: usize = 2;
        pub const RATED_SUPERHEAT: usize = 3;
        pub const RATED_RETURN_GAS_TEMPERATURE: usize = 4;
        pub const END_USE_SUBCATEGORY: usize = 5;
    }

    pub mod refrigeration_case {
        pub const NAME: usize = 0;
        pub const AVAILABILITY_SCHEDULE: usize = 1;
        pub const RATED_TOTAL_COOLING_CAPACITY_PER_UNIT_LENGTH: usize = 2;
        pub const CASE_LENGTH: usize = 3;
        pub const CASE_OPERATING_TEMPERATURE: usize = 4;
    }

    pub mod refrigeration_system {
        pub const NAME: usize = 0;
        pub const CASE_AND_WALKIN_LIST: usize = 1;
        pub const COMPRESSOR_LIST: usize = 2;
        pub const MINIMUM_CONDENSING_TEMPERATURE: usize = 3;
        pub const WORKING_FLUID_TYPE: usize = 4;
        pub const SUCTION_TEMPERATURE_CONTROL_TYPE: usize = 5;
    }

    pub mod chiller_heater_performance {
        pub const NAME: usize = 0;
        pub const REFERENCE_COOLING_MODE_EVAPORATOR_CAPACITY: usize = 1;
        pub const REFERENCE_COOLING_MODE_COP: usize = 2;
        pub const COOLING_MODE_CAPACITY_CURVE: usize = 3;
        pub const DESIGN_HOT_WATER_FLOW_RATE: usize = 4;
    }

    pub mod central_heat_pump_system_module {
        pub const NAME: usize = 0;
        pub const PERFORMANCE_COMPONENT: usize = 1;
        pub const CONTROL_SCHEDULE: usize = 2;
        pub const NUMBER_OF_MODULES: usize = 3;
    }

    pub mod central_heat_pump_system {
        pub const NAME: usize = 0;
        pub const CONTROL_METHOD: usize = 1;
        pub const ANCILLARY_POWER: usize = 2;
        pub const ANCILLARY_OPERATION_SCHEDULE: usize = 3;
        pub const MODULE_LIST: usize = 4;
    }

    pub mod surface {
        pub const NAME: usize = 0;
        pub const SURFACE_TYPE: usize = 1;
        pub const OUTSIDE_BOUNDARY_CONDITION: usize = 2;
        pub const OUTSIDE_BOUNDARY_CONDITION_OBJECT: usize = 3;
        pub const SUN_EXPOSURE: usize = 4;
        pub const WIND_EXPOSURE: usize = 5;
    }
}

/// Workspace-layer field indices
pub mod idf {
    pub mod version {
        pub const VERSION_IDENTIFIER: usize = 0;
    }

    pub mod schedule_type_limits {
        pub const NAME: usize = 0;
        pub const LOWER_LIMIT_VALUE: usize = 1;
        pub const UPPER_LIMIT_VALUE: usize = 2;
        pub const NUMERIC_TYPE: usize = 3;
        pub const UNIT_TYPE: usize = 4;
    }

    pub mod schedule_constant {
        pub const NAME: usize = 0;
        pub const SCHEDULE_TYPE_LIMITS_NAME: usize = 1;
        pub const HOURLY_VALUE: usize = 2;
    }

    pub mod curve_quadratic {
        pub const NAME: usize = 0;
        pub const COEFFICIENT1_CONSTANT: usize = 1;
        pub const COEFFICIENT2_X: usize = 2;
        pub const COEFFICIENT3_X2: usize = 3;
        pub const MINIMUM_VALUE_OF_X: usize = 4;
        pub const MAXIMUM_VALUE_OF_X: usize = 5;
    }

    pub mod curve_cubic {
        pub const NAME: usize = 0;
        pub const COEFFICIENT1_CONSTANT: usize = 1;
        pub const COEFFICIENT2_X: usize = 2;
        pub const COEFFICIENT3_X2: usize = 3;
        pub const COEFFICIENT4_X3: usize = 4;
        pub const MINIMUM_VALUE_OF_X: usize = 5;
        pub const MAXIMUM_VALUE_OF_X: usize = 6;
    }

    pub mod refrigeration_compressor {
        pub const NAME: usize = 0;
        pub const POWER_CURVE_NAME: usize = 1;
        pub const CAPACITY_CURVE_NAME: usize = 2;
        pub const RATED_SUPERHEAT: usize = 3;
        pub const RATED_RETURN_GAS_TEMPERATURE: usize = 4;
        pub const END_USE_SUBCATEGORY: usize = 5;
    }

    pub mod refrigeration_compressor_list {
        pub const NAME: usize = 0;
        /// Group offset
        pub const COMPRESSOR_NAME: usize = 0;
    }

    pub mod refrigeration_case {
        pub const NAME: usize = 0;
        pub const AVAILABILITY_SCHEDULE_NAME: usize = 1;
        pub const RATED_TOTAL_COOLING_CAPACITY_PER_UNIT_LENGTH: usize = 2;
        pub const CASE_LENGTH: usize = 3;
        pub const CASE_OPERATING_TEMPERATURE: usize = 4;
    }

    pub mod refrigeration_case_and_walkin_list {
        pub const NAME: usize = 0;
        /// Group offset
        pub const CASE_OR_WALKIN_NAME: usize = 0;
    }

    pub mod refrigeration_system {
        pub const NAME: usize = 0;
        pub const CASE_OR_WALKIN_OR_LIST_NAME: usize = 1;
        pub const COMPRESSOR_OR_COMPRESSOR_LIST_NAME: usize = 2;
        pub const MINIMUM_CONDENSING_TEMPERATURE: usize = 3;
        pub const WORKING_FLUID_TYPE: usize = 4;
        pub const SUCTION_TEMPERATURE_CONTROL_TYPE: usize = 5;
    }

    pub mod chiller_heater_performance {
        pub const NAME: usize = 0;
        pub const REFERENCE_COOLING_MODE_EVAPORATOR_CAPACITY: usize = 1;
        pub const REFERENCE_COOLING_MODE_COP: usize = 2;
        pub const COOLING_MODE_CAPACITY_CURVE_NAME: usize = 3;
        pub const DESIGN_HOT_WATER_FLOW_RATE: usize = 4;
    }

    pub mod central_heat_pump_system {
        pub const NAME: usize = 0;
        pub const CONTROL_METHOD: usize = 1;
        pub const ANCILLARY_POWER: usize = 2;
        pub const ANCILLARY_OPERATION_SCHEDULE_NAME: usize = 3;
        // Group offsets
        pub const PERFORMANCE_COMPONENT_OBJECT_TYPE: usize = 0;
        pub const PERFORMANCE_COMPONENT_NAME: usize = 1;
        pub const CONTROL_SCHEDULE_NAME: usize = 2;
        pub const NUMBER_OF_MODULES: usize = 3;
    }

    pub mod building_surface_detailed {
        pub const NAME: usize = 0;
        pub const SURFACE_TYPE: usize = 1;
        pub const OUTSIDE_BOUNDARY_CONDITION: usize = 2;
        pub const OUTSIDE_BOUNDARY_CONDITION_OBJECT: usize = 3;
        pub const SUN_EXPOSURE: usize = 4;
        pub const WIND_EXPOSURE: usize = 5;
    }

    pub mod catchall {
        pub const OBJECT_TYPE_NAME: usize = 0;
        /// Group offset
        pub const RAW_FIELD: usize = 0;
    }
}
