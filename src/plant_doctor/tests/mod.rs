mod plant_doctor_test;
